pub mod globe_pipeline;
