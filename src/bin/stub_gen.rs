use pyo3_stub_gen::Result;

fn main() -> Result<()> {
    let stub = eto_rs::stub_info()?;
    stub.generate()?;
    Ok(())
}
