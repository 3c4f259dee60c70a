pub mod config;
pub mod content;
pub mod controllers;
pub mod hooks;
pub mod models;

pub mod components {
    pub mod about;
    pub mod case_study_modal;
    pub mod contact;
    pub mod dynamic_text;
    pub mod footer;
    pub mod heart;
    pub mod hero;
    pub mod navbar;
    pub mod portfolio;
}

pub mod pages {
    pub mod home;
    pub mod not_found;
}
