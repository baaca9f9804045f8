pub mod google_tts_repository;
pub mod storage_repository;
pub mod supabase_storage_repository;
pub mod tts_repository;

pub use google_tts_repository::GoogleTtsRepository;
pub use storage_repository::{StorageError, StorageRepository};
pub use supabase_storage_repository::SupabaseStorageRepository;
pub use tts_repository::{SynthesisError, TtsRepository};
