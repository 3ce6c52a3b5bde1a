use chunk64::{STANDARD, decode_to, encode_to};

fn main() {
    let mut args = std::env::args().skip(1);
    let (Some(mode), Some(input)) = (args.next(), args.next()) else {
        eprintln!("usage: simple_use [-e|-d] <text>");
        std::process::exit(1);
    };

    match mode.as_str() {
        "-e" => println!("{}", encode_to(&input, &STANDARD, true).unwrap()),
        "-d" => match decode_to::<String>(&input, &STANDARD, true) {
            Ok(decoded) => println!("{decoded}"),
            Err(err) => {
                eprintln!("simple_use: {err}");
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("simple_use: no matching argument: {other}");
            std::process::exit(1);
        }
    }
}
