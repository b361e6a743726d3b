mod account;
mod bid;
mod collection;
mod revoked_token;
