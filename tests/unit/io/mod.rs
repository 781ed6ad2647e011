mod catalog;
mod progress;
