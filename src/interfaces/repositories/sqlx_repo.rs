use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxPhotoRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxAlbumRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxContentRepo {
    pub pool: SqlitePool,
}
