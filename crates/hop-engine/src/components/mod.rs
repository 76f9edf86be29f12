pub mod entity;
pub mod totem;
