pub mod api {
    pub mod models {
        pub mod video;
    }
    pub mod client;
    pub mod error;
}

pub mod config;
pub mod logger;
