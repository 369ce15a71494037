pub mod fruit_visuals;
