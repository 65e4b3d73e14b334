mod blog;
mod comment;
mod follow;
mod user;
