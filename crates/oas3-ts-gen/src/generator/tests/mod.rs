mod loader;
mod support;
