pub mod compute;
pub mod display;
pub mod entities;
pub mod input;
pub mod map;
pub mod menu;
pub mod persistence;
pub mod snake;
pub mod spawn;
