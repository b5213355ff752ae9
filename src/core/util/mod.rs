pub mod hash_util;
pub mod text_util;
