use std::path::Path;
use std::process::Command;

fn main() {
    generate_tailwind();
}

fn generate_tailwind() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let tailwind_input = Path::new(manifest_dir).join("tailwind.css");
    let tailwind_output = Path::new(manifest_dir).join("assets/tailwind.css");

    println!("cargo:rerun-if-changed={}", tailwind_input.display());
    println!("cargo:rerun-if-changed=../kodigo-ui/src");
    println!("cargo:rerun-if-changed=src");

    let tailwind_bin = Path::new(manifest_dir).join("node_modules/.bin/tailwindcss");
    if !tailwind_bin.exists() {
        // `asset!` needs the file to exist; ship unstyled until `npm install` runs
        if !tailwind_output.exists() {
            std::fs::write(&tailwind_output, "/* run `npm install` to generate */\n")
                .expect("Failed to write placeholder tailwind.css");
        }
        println!("cargo:warning=tailwindcss not installed, skipping CSS generation");
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
        Ok(output) if output.status.success() => {
            println!("cargo:warning=Tailwind CSS generated successfully");
        }
        Ok(output) => {
            eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
            eprintln!("STDOUT: {}", String::from_utf8_lossy(&output.stdout));
            panic!("Tailwind CSS generation failed");
        }
        Err(e) => panic!("Failed to run tailwindcss: {}", e),
    }
}
