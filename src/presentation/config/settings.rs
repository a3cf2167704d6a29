/// Runtime settings, read from the environment with local defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_file_size_mb: u64,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(3000),
            },
            upload: UploadSettings {
                max_file_size_mb: std::env::var("MAX_UPLOAD_MB")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
            },
        }
    }
}

impl UploadSettings {
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb * 1024 * 1024
    }
}
