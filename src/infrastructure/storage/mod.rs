mod http_audio_resolver;

pub use http_audio_resolver::HttpAudioResolver;
