// --- File: constants.rs ---
// --- Global Simulation Constants ---
pub const BACKGROUND_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

// --- Window / Arena ---
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
pub const FPS_UPDATE_INTERVAL_SECS: f64 = 0.5;

// --- Population ---
pub const MAX_UNITS: usize = 100;
pub const INITIAL_JUVENILE_COUNT: usize = 4;
pub const INITIAL_ADULT_COUNT: usize = 1;
// Balancer keeps at least this many juveniles per adult
pub const JUVENILE_PER_ADULT_RATIO: usize = 4;
pub const POPULATION_REPORT_INTERVAL_FRAMES: u64 = 60;

// --- Unit Shape & Motion ---
pub const EGG_RADIUS: f32 = 5.0;
pub const HATCHED_RADIUS: f32 = 10.0;
pub const UNIT_SPEED: f32 = 2.0; // Pixels per frame, not scaled by dt

// --- Life Stages ---
pub const HATCH_AGE_SECS: f32 = 5.0;
// One draw in 0..=ADULT_HATCH_ODDS_MAX, zero hatches an adult (1 in 5)
pub const ADULT_HATCH_ODDS_MAX: u32 = 4;

// --- Collisions ---
pub const RESTITUTION: f32 = 0.9;

// --- Interaction (pointer / touch) ---
pub const INTERACTION_RADIUS: f32 = 20.0;
pub const INTERACTION_TTL_SECS: f32 = 0.1;
pub const INTERACTION_DEFLECT_FACTOR: f32 = 1.5;

// --- Colors (RGBA, 0..1) ---
pub const EGG_COLOR: [f32; 4] = [0.99, 0.98, 0.0, 1.0]; // Yellow
pub const JUVENILE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0]; // White
pub const ADULT_COLOR: [f32; 4] = [0.9, 0.16, 0.22, 1.0]; // Red
pub const INTERACTION_COLOR: [f32; 4] = [0.0, 0.47, 0.95, 1.0]; // Blue

// --- End of File: constants.rs ---
