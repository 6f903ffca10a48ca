// Application layer: terminal presentation of the season views.

pub mod render;
