mod apps;
mod settings;
mod terminal;
mod windows;
