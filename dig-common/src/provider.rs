use crate::error::FetchError;
use crate::models::{Album, AlbumCollection, Genre};
use crate::query::CrateQuery;

/// Source of genres and album crates.
///
/// Implementations are single-threaded (the browser event loop), so futures
/// are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait AlbumProvider {
    async fn fetch_genres(&self) -> Result<Vec<Genre>, FetchError>;

    async fn fetch_random_albums(
        &self,
        count: u32,
        genre_ids: &[u32],
        min_tracks: Option<u32>,
    ) -> Result<AlbumCollection, FetchError>;

    async fn fetch_chart_albums(&self, count: u32) -> Result<AlbumCollection, FetchError>;

    async fn fetch_search_albums(
        &self,
        q: &str,
        count: u32,
    ) -> Result<AlbumCollection, FetchError>;

    /// `Ok(None)` when the provider has no album with that id
    async fn fetch_album(&self, id: u64) -> Result<Option<Album>, FetchError>;

    /// Dispatch a resolved query to the matching endpoint. A single-album
    /// lookup comes back as a crate of one.
    async fn fetch_crate(&self, query: &CrateQuery) -> Result<AlbumCollection, FetchError> {
        match query {
            CrateQuery::Random {
                count,
                genre_ids,
                min_tracks,
            } => self.fetch_random_albums(*count, genre_ids, *min_tracks).await,
            CrateQuery::Chart { count } => self.fetch_chart_albums(*count).await,
            CrateQuery::Search { q, count } => self.fetch_search_albums(q, *count).await,
            CrateQuery::Album { id } => match self.fetch_album(*id).await? {
                Some(album) => Ok(AlbumCollection {
                    albums: vec![album],
                    total: 1,
                }),
                None => Err(FetchError::AlbumNotFound(*id)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{album, collection, FakeProvider};

    #[tokio::test]
    async fn test_fetch_crate_dispatches_random() {
        let provider = FakeProvider::with_responses([Ok(collection(2))]);
        let query = CrateQuery::random(10, [129, 152], Some(2));

        let result = provider.fetch_crate(&query).await.unwrap();

        assert_eq!(result.albums.len(), 2);
        assert_eq!(
            provider.requests.borrow().as_slice(),
            ["/albums/random?count=10&genres=129,152&min_tracks=2"]
        );
    }

    #[tokio::test]
    async fn test_fetch_crate_dispatches_chart() {
        let provider = FakeProvider::with_responses([Ok(collection(1))]);
        provider.fetch_crate(&CrateQuery::chart(20)).await.unwrap();
        assert_eq!(
            provider.requests.borrow().as_slice(),
            ["/albums/chart?count=20"]
        );
    }

    #[tokio::test]
    async fn test_fetch_crate_dispatches_search() {
        let provider = FakeProvider::with_responses([Ok(collection(3))]);
        let query = CrateQuery::search("kind of blue", 10).unwrap();

        let result = provider.fetch_crate(&query).await.unwrap();

        assert_eq!(result.total, 3);
        assert_eq!(
            provider.requests.borrow().as_slice(),
            ["/albums/search?q=kind%20of%20blue&count=10"]
        );
    }

    #[tokio::test]
    async fn test_album_lookup_becomes_crate_of_one() {
        let provider = FakeProvider::default();
        provider.albums.borrow_mut().insert(7, album(7));

        let result = provider.fetch_crate(&CrateQuery::album(7)).await.unwrap();

        assert_eq!(result.albums, vec![album(7)]);
        assert_eq!(result.total, 1);
        assert_eq!(provider.requests.borrow().as_slice(), ["/albums/7"]);
    }

    #[tokio::test]
    async fn test_missing_album_is_not_found() {
        let provider = FakeProvider::default();
        assert_eq!(
            provider.fetch_crate(&CrateQuery::album(404)).await,
            Err(FetchError::AlbumNotFound(404))
        );
    }
}
