// src/tables.rs

//! Static data tables: the built-in default pattern set, the MIME allow/block
//! lists used by the classifier, and the extension-to-Markdown-language map.
//!
//! These are data inputs to the pipeline, not logic. The language map is built
//! lazily; later entries in the source array override earlier ones, so more
//! specific or more modern language tags win.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in include/exclude rules, applied before user patterns unless
/// `--no-default-patterns` is given.
///
/// Plain entries include, `!`-prefixed entries exclude; later rules override
/// earlier ones. Trailing `/` marks a directory rule covering everything
/// beneath it.
pub const DEFAULT_PATTERNS: &[&str] = &[
    // exclude config/lock/editor droppings
    "!.env",
    "!.envrc",
    "!pdm.lock",
    "!poetry.lock",
    "!Pipfile.lock",
    "!package-lock.json",
    "!yarn.lock",
    "!pnpm-lock.yaml",
    "!.gitignore",
    "!.dockerignore",
    "!.npmignore",
    "!.prettierignore",
    "!.eslintignore",
    "!.gitattributes",
    "!.gitmodules",
    "!.gitconfig",
    "!.gitkeep",
    "!CODE_OF_CONDUCT.md",
    "!CONTRIBUTING.md",
    "!SECURITY.md",
    "!.DS_Store",
    "!*.swp",
    "!*.swo",
    "!*.log",
    "!*.tmp",
    "!*.temp",
    "!*.bak",
    "!*.old",
    "!*.orig",
    "!*.rej",
    "!*.swx",
    "!*.swn",
    // svn conflict files
    "!*.mine",
    "!*.prej",
    "!*.wrk",
    "!*.base",
    // binary build artifacts (excluded so the classifier never opens them)
    "!*.dump",
    "!*.dmp",
    "!*.o",
    "!*.obj",
    "!*.pyc",
    "!*.pyo",
    "!*.pyd",
    "!*.so",
    "!*.dll",
    "!*.exe",
    "!*.bin",
    "!*.a",
    "!*.lib",
    "!*.apk",
    "!*.dylib",
    "!*.app",
    "!*.appx",
    "!*.appxbundle",
    "!*.ipa",
    "!*.msi",
    "!*.msix",
    "!*.suo",
    "!*.pdb",
    "!*.idb",
    "!*.ilk",
    "!*.exp",
    // re-include well-known docs
    "README",
    "README.md",
    "README.txt",
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    // exclude VCS and tooling directories
    "!.git/",
    "!.svn/",
    "!.hg/",
    "!.venv/",
    "!venv/",
    "!node_modules/",
    "!__pycache__/",
    "!.tox/",
    "!.pytest_cache/",
    "!/out/",
    "!/dist/",
    "!.pdm-build/",
    "!.github/",
    "!.*cache*/",
    "!.mypy_cache/",
    "!.nyc_output/",
    "!.coverage/",
    // common cache dirs
    "!.cache/",
    "!.local/",
    "!.npm/",
    "!.yarn/",
    "!.serverless*/",
    "!.terraform*/",
    "!.vagrant*/",
];

/// Top-level MIME types that are excluded without reading file content,
/// unless the extension has a known language mapping or the full MIME type is
/// on [`OK_MIMETYPES`].
pub const IGNORE_MIME_SUPERTYPES: &[&str] = &["application", "audio", "font", "image", "video"];

/// Full MIME types that are always treated as text, overriding
/// [`IGNORE_MIME_SUPERTYPES`].
pub const OK_MIMETYPES: &[&str] = &[
    "application/json",
    "application/manifest+json",
    "application/postscript",
    "application/vnd.adobe.xdp+xml",
    "application/xml",
    "application/xaml+xml",
    "application/opensearchdescription+xml",
    "application/javascript",
    "application/xhtml+xml",
    "application/xml-dtd",
    "application/xslt+xml",
    "application/x-javascript",
    "application/x-sh",
    "application/x-tex",
    "application/x-latex",
];

/// Extension (with leading dot) to Markdown fence language tag.
///
/// Later entries override earlier ones when the map is built.
const FILEEXT_TO_MDLANG_ENTRIES: &[(&str, &str)] = &[
    (".1", "troff"),
    (".2", "troff"),
    (".3", "troff"),
    (".4", "troff"),
    (".4th", "forth"),
    (".5", "troff"),
    (".6", "troff"),
    (".7", "troff"),
    (".8", "troff"),
    (".9", "troff"),
    (".apl", "apl"),
    (".asc", "asciiarmor"),
    (".asn", "asn1"),
    (".asn1", "asn1"),
    (".b", "brainfuck"),
    (".bash", "shell"),
    (".bat", "batch"),
    (".bf", "brainfuck"),
    (".build", "python"),
    (".bzl", "python"),
    (".c", "cpp"),
    (".c++", "cpp"),
    (".cc", "cpp"),
    (".cfg", "ttcn-cfg"),
    (".cjs", "javascript"),
    (".cl", "lisp"),
    (".clj", "clojure"),
    (".cljc", "clojure"),
    (".cljs", "clojure"),
    (".cljx", "clojure"),
    (".cmake", "cmake"),
    (".cmd", "batch"),
    (".cob", "cobol"),
    (".coffee", "coffeescript"),
    (".cpp", "cpp"),
    (".cpy", "cobol"),
    (".cql", "sql"),
    (".cr", "crystal"),
    (".cs", "clike"),
    (".css", "css"),
    (".cxx", "cpp"),
    (".cyp", "cypher"),
    (".cypher", "cypher"),
    (".d", "d"),
    (".dart", "clike"),
    (".diff", "diff"),
    (".dtd", "dtd"),
    (".dyalog", "apl"),
    (".dyl", "dylan"),
    (".dylan", "dylan"),
    (".e", "eiffel"),
    (".ecl", "ecl"),
    (".edn", "clojure"),
    (".el", "lisp"),
    (".elm", "elm"),
    (".erl", "erlang"),
    (".f", "fortran"),
    (".f77", "fortran"),
    (".f90", "fortran"),
    (".f95", "fortran"),
    (".factor", "factor"),
    (".feature", "gherkin"),
    (".for", "fortran"),
    (".forth", "forth"),
    (".fs", "mllike"),
    (".fth", "forth"),
    (".gemspec", "ruby"),
    (".go", "go"),
    (".gradle", "groovy"),
    (".groovy", "groovy"),
    (".gss", "css"),
    (".h", "cpp"),
    (".h++", "cpp"),
    (".handlebars", "html"),
    (".hbs", "html"),
    (".hh", "cpp"),
    (".hpp", "cpp"),
    (".hs", "haskell"),
    (".htm", "html"),
    (".html", "html"),
    (".hx", "haxe"),
    (".hxml", "haxe"),
    (".hxx", "cpp"),
    (".in", "properties"),
    (".ini", "properties"),
    (".ino", "cpp"),
    (".intr", "dylan"),
    (".irb", "ruby"),
    (".j2", "jinja2"),
    (".java", "java"),
    (".jinja", "jinja2"),
    (".jinja2", "jinja2"),
    (".jl", "julia"),
    (".js", "javascript"),
    (".jse", "javascript"),
    (".json", "json"),
    (".jsonld", "javascript"),
    (".jsx", "javascript"),
    (".ksh", "shell"),
    (".kt", "clike"),
    (".less", "css"),
    (".lisp", "lisp"),
    (".ls", "livescript"),
    (".ltx", "stex"),
    (".lua", "lua"),
    (".m", "clike"),
    (".map", "json"),
    (".markdown", "markdown"),
    (".mbox", "mbox"),
    (".md", "markdown"),
    (".mjs", "javascript"),
    (".mkd", "markdown"),
    (".ml", "mllike"),
    (".mli", "mllike"),
    (".mll", "mllike"),
    (".mly", "mllike"),
    (".mm", "clike"),
    (".mo", "modelica"),
    (".mps", "mumps"),
    (".msc", "mscgen"),
    (".mscgen", "mscgen"),
    (".mscin", "mscgen"),
    (".msgenny", "mscgen"),
    (".nb", "mathematica"),
    (".nq", "ntriples"),
    (".nsh", "nsis"),
    (".nsi", "nsis"),
    (".nt", "ntriples"),
    (".nut", "clike"),
    (".oz", "oz"),
    (".p", "pascal"),
    (".pas", "pascal"),
    (".patch", "diff"),
    (".pgp", "asciiarmor"),
    (".php", "php"),
    (".php3", "php"),
    (".php4", "php"),
    (".php5", "php"),
    (".php7", "php"),
    (".phtml", "php"),
    (".pig", "pig"),
    (".pl", "perl"),
    (".pls", "sql"),
    (".pm", "perl"),
    (".podspec", "ruby"),
    (".pp", "puppet"),
    (".pro", "idl"),
    (".properties", "properties"),
    (".proto", "protobuf"),
    (".ps1", "powershell"),
    (".psd1", "powershell"),
    (".psm1", "powershell"),
    (".pxd", "python"),
    (".pxi", "python"),
    (".py", "python"),
    (".pyw", "python"),
    (".pyx", "python"),
    (".q", "q"),
    (".r", "r"),
    (".rake", "ruby"),
    (".rb", "ruby"),
    (".rbw", "ruby"),
    (".rq", "sparql"),
    (".rs", "rust"),
    (".s", "gas"),
    (".sas", "sas"),
    (".scala", "clike"),
    (".scm", "scheme"),
    (".scss", "css"),
    (".sh", "shell"),
    (".sieve", "sieve"),
    (".sig", "asciiarmor"),
    (".siv", "sieve"),
    (".sparql", "sparql"),
    (".spec", "rpm"),
    (".sql", "sql"),
    (".ss", "scheme"),
    (".st", "smalltalk"),
    (".styl", "stylus"),
    (".svg", "xml"),
    (".swift", "swift"),
    (".tcl", "tcl"),
    (".tex", "stex"),
    (".text", "stex"),
    (".textile", "textile"),
    (".thor", "ruby"),
    (".toml", "toml"),
    (".ts", "javascript"),
    (".tsx", "javascript"),
    (".ttcn", "ttcn"),
    (".ttcn3", "ttcn"),
    (".ttcnpp", "ttcn"),
    (".ttl", "turtle"),
    (".v", "verilog"),
    (".vb", "vb"),
    (".vbe", "vbscript"),
    (".vbs", "vbscript"),
    (".vhd", "vhdl"),
    (".vhdl", "vhdl"),
    (".vtl", "velocity"),
    (".wast", "wast"),
    (".wat", "wast"),
    (".webidl", "webidl"),
    (".wl", "mathematica"),
    (".wls", "mathematica"),
    (".xml", "xml"),
    (".xquery", "xquery"),
    (".xsd", "xml"),
    (".xsl", "xml"),
    (".xu", "mscgen"),
    (".xy", "xquery"),
    (".yaml", "yaml"),
    (".yml", "yaml"),
    (".ys", "yacas"),
    (".z80", "z80"),
    // modern overrides for the common cases
    (".md", "markdown"),
    (".py", "python"),
    (".json", "json"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
    (".toml", "toml"),
    (".sh", "bash"),
    (".bash", "bash"),
    (".zsh", "bash"),
    (".fish", "fish"),
    (".c", "c"),
    (".cpp", "cpp"),
    (".h", "cpp"),
    (".hpp", "cpp"),
    (".html", "html"),
    (".css", "css"),
    (".js", "javascript"),
    (".ts", "typescript"),
    (".tsx", "typescript"),
    (".jsx", "javascript"),
    (".java", "java"),
    (".kt", "kotlin"),
    (".rs", "rust"),
    (".go", "go"),
    (".php", "php"),
    (".sql", "sql"),
    (".rb", "ruby"),
    (".r", "r"),
    (".lua", "lua"),
    (".swift", "swift"),
    (".scala", "scala"),
    (".groovy", "groovy"),
    (".gradle", "groovy"),
    (".xml", "xml"),
    (".svg", "xml"),
    (".csv", "csv"),
    (".tsv", "csv"),
    (".ini", "ini"),
    (".cfg", "ini"),
    (".conf", "ini"),
    (".properties", "ini"),
    (".editorconfig", "ini"),
    (".graphql", "graphql"),
    (".gql", "graphql"),
    (".proto", "protobuf"),
    (".asciidoc", "asciidoc"),
    (".adoc", "asciidoc"),
    (".ad", "asciidoc"),
    (".asc", "asciidoc"),
    (".tex", "latex"),
    (".latex", "latex"),
    (".bib", "latex"),
    (".ltx", "latex"),
    (".sty", "latex"),
    (".cls", "latex"),
    (".dtx", "latex"),
    (".ins", "latex"),
    (".mk", "makefile"),
    (".makefile", "makefile"),
    (".make", "makefile"),
    (".ninja", "ninja"),
    (".gn", "ninja"),
    (".pl", "perl"),
    (".pm", "perl"),
    (".t", "perl"),
    (".pod", "perl"),
    (".cgi", "perl"),
    (".po", "gettext"),
    (".pot", "gettext"),
    (".mo", "gettext"),
    (".cs", "csharp"),
    (".csproj", "xml"),
    (".sln", "xml"),
    (".fs", "fsharp"),
    (".fsproj", "xml"),
    (".fsi", "fsharp"),
    (".fsx", "fsharp"),
    (".vba", "vbscript"),
    (".vb", "vbscript"),
    (".vbscript", "vbscript"),
    (".wsf", "xml"),
    (".vim", "vim"),
    (".el", "lisp"),
    (".hrl", "erlang"),
    (".es", "erlang"),
    (".escript", "erlang"),
    (".hs", "haskell"),
    (".lhs", "haskell"),
    (".cabal", "haskell"),
    (".pem", "text"),
    (".crt", "text"),
    (".csr", "text"),
    (".key", "text"),
    (".htaccess", "apache"),
];

/// Lazily-built extension to language map. Later source entries win.
pub static FILEEXT_TO_MDLANG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(FILEEXT_TO_MDLANG_ENTRIES.len());
    for (ext, lang) in FILEEXT_TO_MDLANG_ENTRIES {
        map.insert(*ext, *lang);
    }
    map
});

/// Looks up the Markdown language tag for a file extension.
///
/// `ext` is expected with its leading dot (e.g. `".rs"`). The exact spelling
/// is tried first, then the lowercase form. Returns `""` when unknown.
pub fn md_lang_for_extension(ext: &str) -> &'static str {
    if ext.is_empty() {
        return "";
    }
    if let Some(lang) = FILEEXT_TO_MDLANG.get(ext) {
        return lang;
    }
    FILEEXT_TO_MDLANG
        .get(ext.to_lowercase().as_str())
        .copied()
        .unwrap_or("")
}
