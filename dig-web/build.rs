use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

/// Compile `tailwind.css` into `assets/tailwind.css`, scanning dig-ui and
/// dig-web sources for classes. Without a local tailwindcss install the
/// committed stylesheet is kept as is.
fn generate_tailwind() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let tailwind_input = manifest_dir.join("tailwind.css");
    let tailwind_output = manifest_dir.join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-changed=../dig-ui/src");

    let tailwind_bin = manifest_dir.join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        println!("cargo:warning=tailwindcss not installed, using committed assets/tailwind.css");
        return;
    }

    let output = Command::new(&tailwind_bin)
        .arg("-i")
        .arg(&tailwind_input)
        .arg("-o")
        .arg(&tailwind_output)
        .current_dir(manifest_dir)
        .output();

    match output {
        Ok(output) if output.status.success() => {}
        Ok(output) => {
            println!("cargo:warning=Tailwind CSS generation failed");
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                println!("cargo:warning={line}");
            }
        }
        Err(e) => println!("cargo:warning=Failed to run tailwindcss: {e}"),
    }
}
