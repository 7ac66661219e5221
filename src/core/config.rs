use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub media: MediaConfig,
    pub storage: StorageConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Limits applied by the media ingestion pipeline
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Per-file size ceiling in bytes; oversize files are skipped, not rejected
    pub max_file_size_bytes: usize,
}

/// Which storage backend handles uploaded bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendKind {
    S3,
    Local,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub backend: StorageBackendKind,
    pub s3: Option<S3Config>,
    pub local: LocalDiskConfig,
}

/// S3-compatible object storage configuration
#[derive(Debug, Clone)]
pub struct S3Config {
    /// Endpoint URL of the object store
    pub endpoint: String,
    /// Public endpoint used to build retrievable URLs (defaults to endpoint)
    pub public_endpoint: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub region: String,
}

/// Local filesystem storage configuration (development fallback)
#[derive(Debug, Clone)]
pub struct LocalDiskConfig {
    /// Directory uploaded files are written into
    pub root_dir: PathBuf,
    /// URL prefix the files are served under
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            media: MediaConfig::from_env()?,
            storage: StorageConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    // Conservative pool defaults for a small-medium app
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 1800; // 30 minutes

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        let idle_timeout_secs = env::var("DB_IDLE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_IDLE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_IDLE_TIMEOUT_SECS must be a valid number".to_string())?;

        let max_lifetime_secs = env::var("DB_MAX_LIFETIME_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_LIFETIME_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_MAX_LIFETIME_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl MediaConfig {
    /// 500 MiB, sized for full-resolution photos and short video clips
    const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 500 * 1024 * 1024;

    pub fn from_env() -> Result<Self, String> {
        let max_file_size_bytes = env::var("MEDIA_MAX_FILE_SIZE_BYTES")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_FILE_SIZE_BYTES.to_string())
            .parse::<usize>()
            .map_err(|_| "MEDIA_MAX_FILE_SIZE_BYTES must be a valid number".to_string())?;

        Ok(Self {
            max_file_size_bytes,
        })
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        // Explicit STORAGE_BACKEND wins; otherwise the presence of an S3
        // endpoint selects the object store, local disk is the fallback.
        let backend = match env::var("STORAGE_BACKEND").ok().as_deref() {
            Some("s3") => StorageBackendKind::S3,
            Some("local") => StorageBackendKind::Local,
            Some(other) => {
                return Err(format!(
                    "STORAGE_BACKEND must be 's3' or 'local', got '{}'",
                    other
                ))
            }
            None => {
                if env::var("S3_ENDPOINT").is_ok() {
                    StorageBackendKind::S3
                } else {
                    StorageBackendKind::Local
                }
            }
        };

        let s3 = if backend == StorageBackendKind::S3 {
            Some(S3Config::from_env()?)
        } else {
            None
        };

        Ok(Self {
            backend,
            s3,
            local: LocalDiskConfig::from_env()?,
        })
    }
}

impl S3Config {
    pub fn from_env() -> Result<Self, String> {
        let endpoint = env::var("S3_ENDPOINT")
            .map_err(|_| "S3_ENDPOINT must be set for the s3 storage backend".to_string())?;

        // Public endpoint defaults to the main endpoint if not specified
        let public_endpoint = env::var("S3_PUBLIC_ENDPOINT").unwrap_or_else(|_| endpoint.clone());

        let access_key = env::var("S3_ACCESS_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let secret_key = env::var("S3_SECRET_KEY").unwrap_or_else(|_| "minioadmin".to_string());

        let bucket = env::var("S3_BUCKET").unwrap_or_else(|_| "galerie-media".to_string());

        let region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        Ok(Self {
            endpoint,
            public_endpoint,
            access_key,
            secret_key,
            bucket,
            region,
        })
    }
}

impl LocalDiskConfig {
    pub fn from_env() -> Result<Self, String> {
        let root_dir = env::var("UPLOADS_DIR")
            .unwrap_or_else(|_| "public/uploads".to_string())
            .into();

        let public_base_url =
            env::var("UPLOADS_PUBLIC_BASE_URL").unwrap_or_else(|_| "/uploads".to_string());

        Ok(Self {
            root_dir,
            public_base_url,
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Galerie API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION")
            .unwrap_or_else(|_| "API documentation for the Galerie portfolio backend".to_string());

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
