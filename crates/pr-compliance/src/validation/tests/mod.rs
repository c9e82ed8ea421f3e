mod common;
mod repolink;
mod stage;
mod timing;
