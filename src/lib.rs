mod domain;
mod infrastructure;
mod interfaces;
pub mod constants;
pub mod errors;
pub mod graceful_shutdown;
pub mod settings;

pub use domain::{entities, use_cases};
pub use infrastructure::{db, upload, utils};
pub use interfaces::{handlers, repositories, routes};

use repositories::sqlx_repo::{SqlxAlbumRepo, SqlxContentRepo, SqlxPhotoRepo};
use upload::imgbb::ImgbbClient;
use use_cases::{albums::AlbumHandler, content::ContentHandler, photos::PhotoHandler};

pub struct AppState {
    pub photo_handler: AppPhotoHandler,
    pub album_handler: AppAlbumHandler,
    pub content_handler: AppContentHandler,
    pub uploader: ImgbbClient,
    pub upload_allowed_origins: Vec<String>,
}

pub type AppPhotoHandler = PhotoHandler<SqlxPhotoRepo>;
pub type AppAlbumHandler = AlbumHandler<SqlxAlbumRepo>;
pub type AppContentHandler = ContentHandler<SqlxContentRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::SqlitePool) -> Self {
        let photo_handler = PhotoHandler::new(SqlxPhotoRepo::new(pool.clone()));
        let album_handler = AlbumHandler::new(SqlxAlbumRepo::new(pool.clone()));
        let content_handler = ContentHandler::new(SqlxContentRepo::new(pool));

        let uploader = ImgbbClient::new(
            config.imgbb_api_url.clone(),
            config.imgbb_api_key.clone(),
        );

        AppState {
            photo_handler,
            album_handler,
            content_handler,
            uploader,
            upload_allowed_origins: config.upload_allowed_origins(),
        }
    }
}
