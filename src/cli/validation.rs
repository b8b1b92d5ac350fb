//! CLI argument validation functions
//!
//! Value parsers for arguments that need more than clap's built-in checks.

use std::fs;
use std::path::PathBuf;

/// Validate port number is within valid range (1-65535)
pub fn validate_port(port_str: &str) -> Result<u16, String> {
    let port: u16 = port_str.parse().map_err(|_| {
        format!(
            "Port must be a valid number between 1 and 65535, got: '{}'",
            port_str
        )
    })?;

    if port == 0 {
        return Err("Port must be between 1 and 65535. Port 0 is not allowed.".to_string());
    }

    Ok(port)
}

/// Validate that a file path exists, is a file and is readable
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Validate host address format (basic validation)
pub fn validate_host_address(host_str: &str) -> Result<String, String> {
    let host = host_str.trim();

    if host.is_empty() {
        return Err("Host address cannot be empty".to_string());
    }

    if host.contains(' ') {
        return Err("Host address cannot contain spaces".to_string());
    }

    if host == "localhost" || host == "0.0.0.0" {
        return Ok(host.to_string());
    }

    // Dotted quad: every octet must fit in a u8
    if host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        let parts: Vec<&str> = host.split('.').collect();
        if parts.len() != 4 || parts.iter().any(|part| part.parse::<u8>().is_err()) {
            return Err(format!("Invalid IPv4 address format: '{}'", host_str));
        }
        return Ok(host.to_string());
    }

    if host.len() > 253 {
        return Err("Host address is too long (maximum 253 characters)".to_string());
    }

    Ok(host.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_validation_valid_ports() {
        for port_str in ["1", "80", "443", "8080", "65535"] {
            assert!(validate_port(port_str).is_ok(), "Port {} should be valid", port_str);
        }
    }

    #[test]
    fn test_port_validation_invalid_ports() {
        for port_str in ["0", "65536", "99999", "abc", "-1", ""] {
            assert!(validate_port(port_str).is_err(), "Port {} should be invalid", port_str);
        }
    }

    #[test]
    fn test_host_validation_valid_hosts() {
        let valid_hosts = [
            "localhost",
            "127.0.0.1",
            "0.0.0.0",
            "192.168.1.1",
            "example.com",
            "my-server.local",
        ];

        for host in valid_hosts {
            assert!(validate_host_address(host).is_ok(), "Host {} should be valid", host);
        }
    }

    #[test]
    fn test_host_validation_invalid_hosts() {
        let long_host = "x".repeat(300);
        let invalid_hosts = [
            "",
            "   ",
            "host with spaces",
            "999.999.999.999",
            "10.0.1",
            long_host.as_str(),
        ];

        for host in invalid_hosts {
            assert!(validate_host_address(host).is_err(), "Host '{}' should be invalid", host);
        }
    }

    #[test]
    fn test_config_file_path_validation() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("app.toml");
        std::fs::write(&file, "").unwrap();

        assert!(validate_config_file_path(file.to_str().unwrap()).is_ok());
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
        assert!(validate_config_file_path("/definitely/missing.toml").is_err());
    }
}
