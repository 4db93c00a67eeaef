mod like;

pub use like::LikeRecord;
