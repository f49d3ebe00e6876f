use crate::domain::model::UserId;

/// In-process route. The user id travels as a typed value rather than a
/// path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Directory,
    UserDetails {
        user_id: UserId,
    },
}
