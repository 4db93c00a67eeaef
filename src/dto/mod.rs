mod requests;
mod responses;

pub use requests::LikesQuery;
pub use responses::LikeOutcome;
