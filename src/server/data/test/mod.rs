mod plan;
mod trip;
mod user;
