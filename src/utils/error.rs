use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 設定錯誤，使用者可自行修正
    High,
    /// 系統層級錯誤（綁定埠口、讀檔失敗）
    Critical,
}

impl ContactError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ContactError::IoError(_) => ErrorSeverity::Critical,
            ContactError::ConfigError { .. }
            | ContactError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    /// Process exit code the binary uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContactError::IoError(e) => format!("System I/O failure: {}", e),
            ContactError::ConfigError { message } => {
                format!("The configuration could not be loaded: {}", message)
            }
            ContactError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ContactError::IoError(_) => {
                "Check that the port is free and the host address belongs to this machine"
            }
            ContactError::ConfigError { .. } => {
                "Check the PORT environment variable and the syntax of the config file"
            }
            ContactError::InvalidConfigValueError { .. } => {
                "Fix the value via command line flag or config file and restart"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_follow_severity() {
        let config_err = ContactError::ConfigError {
            message: "bad PORT".to_string(),
        };
        assert_eq!(config_err.severity(), ErrorSeverity::High);
        assert_eq!(config_err.exit_code(), 1);

        let io_err = ContactError::from(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "address in use",
        ));
        assert_eq!(io_err.severity(), ErrorSeverity::Critical);
        assert_eq!(io_err.exit_code(), 3);
    }

    #[test]
    fn test_user_friendly_message_names_field() {
        let err = ContactError::InvalidConfigValueError {
            field: "host".to_string(),
            value: "".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert!(err.user_friendly_message().contains("'host'"));
        assert!(err.to_string().contains("host"));
    }
}
