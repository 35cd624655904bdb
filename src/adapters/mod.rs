// Adapters layer: concrete implementations for external systems.

pub mod image_probe;
pub mod supabase;

pub use image_probe::ImageProbe;
pub use supabase::SupabaseSource;
