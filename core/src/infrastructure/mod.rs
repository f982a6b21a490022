pub mod llm;
pub mod weather;
