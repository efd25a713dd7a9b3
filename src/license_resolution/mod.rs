/// Domain layer - license values and the resolution rules that operate on them
pub mod domain;
pub mod services;
