pub mod generate;
pub mod pipeline;
pub mod publish;
pub mod render;
pub mod routes;
