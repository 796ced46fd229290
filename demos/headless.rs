use brownian::*;

const TICKS: u64 = 600;

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    let mut world = World::new(&config)?;
    world.set_parallel_enabled(true);
    println!(
        "seed {} with {} particles and {} blocks",
        world.seed(),
        world.particle_count(),
        world.block_count()
    );

    let energy = world.kinetic_energy();
    for tick in 1..=TICKS {
        world.step()?;
        if tick % 120 == 0 {
            let momentum = world.total_momentum();
            println!(
                "tick {tick}: energy {:.3} (start {energy:.3}), momentum ({:.3}, {:.3})",
                world.kinetic_energy(),
                momentum.x,
                momentum.y
            );
        }
    }

    for (i, block) in world.blocks().enumerate() {
        println!(
            "block {i} at ({:.2}, {:.2}) moving ({:.3}, {:.3})",
            block.position.x, block.position.y, block.velocity.x, block.velocity.y
        );
    }
    world.profile().report();
    Ok(())
}
