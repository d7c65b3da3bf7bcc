/// Configuration options for the recipe API server.
#[derive(Clone)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database file.
    pub database_url: String,
    /// Address and port the HTTP server binds to.
    pub bind_address: String,
}
