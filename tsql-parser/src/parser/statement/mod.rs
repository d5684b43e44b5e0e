mod admin;
mod select;
mod show;
