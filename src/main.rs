use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), impl std::error::Error> {
    env_logger::init();
    log::info!("starting tinyedit");
    platform::run()
}
