pub mod password;
pub mod read_time;
pub mod slug;
pub mod tags;
