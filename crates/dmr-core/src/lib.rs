pub mod config;
pub mod logging;

// Resolution engine
pub mod archive;
pub mod artifactory;
pub mod classpath;
pub mod error;
pub mod fetch;
pub mod file;
pub mod resolver;
pub mod stream;
pub mod uri;
