mod lowpass;
mod noise;
mod render;

pub use lowpass::bench_lowpass;
pub use noise::bench_noise;
pub use render::bench_render;
