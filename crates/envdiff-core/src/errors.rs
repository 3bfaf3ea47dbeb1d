use thiserror::Error;

/// Result type alias using EnvDiffError
pub type Result<T> = std::result::Result<T, EnvDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Parsing and diffing are total and never produce errors. Every kind here
/// belongs to the edges around them: building records by hand, loading
/// configuration, reading dump text and rendering edit scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidName,

    // Configuration
    InvalidConfig,
    InvalidSeparator,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidName => "ERR_INVALID_NAME",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::InvalidSeparator => "ERR_INVALID_SEPARATOR",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a stable classification for programmatic handling plus optional
/// context (variable name, input path) for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    var_name: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            var_name: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add variable name context
    pub fn with_var_name(mut self, name: impl Into<String>) -> Self {
        self.var_name = Some(name.into());
        self
    }

    /// Add input path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the variable name context, if any
    pub fn var_name(&self) -> Option<&str> {
        self.var_name.as_deref()
    }

    /// Get the input path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(var_name) = &self.var_name {
            write!(f, " (var: {})", var_name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for envdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnvDiffError {
    // ===== Validation Errors =====
    /// A variable record was built with an empty name
    #[error("Variable name cannot be empty")]
    EmptyName,

    /// The path-list separator collides with record or name splitting
    #[error("Invalid path-list separator {separator:?}: {reason}")]
    InvalidSeparator { separator: char, reason: String },

    // ===== Configuration Errors =====
    /// Configuration text could not be parsed
    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },

    // ===== Input Errors =====
    /// A dump could not be read
    #[error("Failed to read input {path}: {message}")]
    ReadInput { path: String, message: String },

    /// Both dumps were requested from stdin
    #[error("Standard input can only be used for one of the two dumps")]
    StdinReusedAsInput,

    // ===== Output Errors =====
    /// A variable cannot be expressed safely in the requested output format
    #[error("Cannot render variable {name:?} as {format}: {reason}")]
    Unrenderable {
        name: String,
        format: String,
        reason: String,
    },

    // ===== Internal Errors =====
    /// Serialization of a snapshot or edit script failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<EnvDiffError> for ExError {
    fn from(err: EnvDiffError) -> Self {
        let display = err.to_string();
        match err {
            EnvDiffError::EmptyName => ExError::new(ExErrorKind::InvalidName).with_message(display),

            EnvDiffError::InvalidSeparator { .. } => {
                ExError::new(ExErrorKind::InvalidSeparator).with_message(display)
            }

            EnvDiffError::ConfigParse { message } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            EnvDiffError::ReadInput { path, message } => ExError::new(ExErrorKind::Io)
                .with_path(path)
                .with_message(message),

            EnvDiffError::StdinReusedAsInput => {
                ExError::new(ExErrorKind::InvalidInput).with_message(display)
            }

            EnvDiffError::Unrenderable { name, .. } => ExError::new(ExErrorKind::InvalidName)
                .with_var_name(name)
                .with_message(display),

            EnvDiffError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_path("/tmp/old.env")
            .with_message("No such file or directory");

        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_IO]"));
        assert!(rendered.contains("No such file or directory"));
        assert!(rendered.contains("/tmp/old.env"));
    }

    #[test]
    fn test_unrenderable_carries_var_name() {
        let ex: ExError = EnvDiffError::Unrenderable {
            name: "X;rm".to_string(),
            format: "shell".to_string(),
            reason: "not a valid identifier".to_string(),
        }
        .into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidName);
        assert_eq!(ex.var_name(), Some("X;rm"));
        assert!(ex.to_string().contains("(var: X;rm)"));
    }

    #[test]
    fn test_empty_name_maps_to_invalid_name() {
        let ex: ExError = EnvDiffError::EmptyName.into();
        assert_eq!(ex.kind(), ExErrorKind::InvalidName);
        assert_eq!(ex.code(), "ERR_INVALID_NAME");
    }
}
