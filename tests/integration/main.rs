mod editing;
mod helpers;
mod history_nav;
mod masking;
mod session;
