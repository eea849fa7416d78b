mod delete;
mod read;
mod replace;
mod validate;
