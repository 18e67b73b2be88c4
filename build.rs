use shadow_rs::ShadowBuilder;

fn main() {
    // Build metadata behind `uptime-relay --version` and the User-Agent
    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
