use crate::client::model::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    /// Marks a pending request as failed; settled entries are left alone.
    pub fn fail_pending(&mut self, error: &ApiError) {
        if self.is_loading() {
            *self = Cache::Error(error.clone());
        }
    }
}
