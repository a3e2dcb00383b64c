mod address;
mod error;
mod limit_query;
