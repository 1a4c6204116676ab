use divan::Bencher;
use linemark::{format_html, Options};

fn main() {
    divan::main();
}

const SECTION: &str = "# A heading with **bold** text

Some paragraph text with *emphasis*, _underline_ and a [link](https://example.com/a).
It continues on a second line with ![an image](img.png).

- an unordered item
- another with ***both***

+ an ordered item
+ and one more

> A quoted line
> and another

Broken **markup and [links](nowhere are kept as text.
";

fn document(sections: usize) -> String {
    SECTION.repeat(sections)
}

#[divan::bench(args = [10, 100, 1000])]
fn bench_synthetic(b: Bencher, sections: usize) {
    let s = document(sections);
    let options = Options::default();

    b.bench(|| {
        let mut output = String::with_capacity(s.len() * 2);
        format_html(&s, &options, &mut output).unwrap();
        output
    });
}

#[divan::bench(args = [1000, 10000])]
fn bench_unclosed_brackets(b: Bencher, n: usize) {
    let s = format!("**b** {}]", "[a ".repeat(n));
    let mut options = Options::default();
    options.render.fragment = true;

    b.bench(|| linemark::markdown_to_html(&s, &options));
}
