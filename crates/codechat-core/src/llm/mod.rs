mod groq;
mod traits;

pub use groq::GroqClient;
pub use traits::*;
