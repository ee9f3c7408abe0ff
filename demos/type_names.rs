use tensorname::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for (backend, scalar_type) in enumerate_declared_types() {
        let name = format_type_name(&(backend, scalar_type))?;
        let options = resolve_type_name(&name)?;
        println!("{:<36} {:?} {:?}", name, options.backend(), options.layout());
    }

    let resolver = TypeNameResolver::global();
    resolver.set_default_tensor_type("torch.cuda.DoubleTensor")?;
    println!("torch.Tensor -> {}", format_type_name(&resolve_type_name(DEFAULT_TYPE_NAME)?)?);

    if let Err(e) = resolve_type_name("torch.wat.Tensor") {
        println!("{}", e);
    }

    Ok(())
}
