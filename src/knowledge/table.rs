//! Well-known environment variables

use super::VariableInfo;

pub const CORE_PATHS: &str = "Core paths";
pub const USER_SESSION: &str = "User and session";
pub const LOCALE: &str = "Localization";
pub const SHELL: &str = "Shell customization";
pub const DEFAULT_APPS: &str = "Default applications";
pub const ZSH: &str = "Zsh ecosystem";
pub const JAVA: &str = "Java";
pub const PYTHON: &str = "Python";
pub const NODE: &str = "Node.js";
pub const GO: &str = "Go";
pub const RUST: &str = "Rust toolchain";
pub const BUILD: &str = "Build system";
pub const PROXY: &str = "Network proxy";

const fn var(
    name: &'static str,
    category: &'static str,
    description: &'static str,
    value_format: &'static str,
    examples: &'static [&'static str],
) -> VariableInfo {
    VariableInfo {
        name,
        category,
        description,
        value_format,
        examples,
    }
}

const DIR_LIST: &str = "Colon-separated list of absolute directories";
const LOCALE_FORMAT: &str = "language[_territory][.charset]";
const COMMAND: &str = "Command name or path of an executable";

pub static VARIABLES: &[VariableInfo] = &[
    // Core paths
    var(
        "PATH",
        CORE_PATHS,
        "Directories searched, in order, for executables typed on the command line.",
        DIR_LIST,
        &["/usr/local/bin:/usr/bin:/bin:/usr/sbin:/sbin"],
    ),
    var(
        "HOME",
        CORE_PATHS,
        "Absolute path of the current user's home directory. Plain `cd` goes here.",
        "Absolute directory path",
        &["/home/username", "/Users/username"],
    ),
    var(
        "PWD",
        CORE_PATHS,
        "Current working directory, updated by the shell on every `cd`.",
        "Absolute directory path",
        &["/home/username/projects/my-app"],
    ),
    var(
        "OLDPWD",
        CORE_PATHS,
        "Previous working directory, used by `cd -`.",
        "Absolute directory path",
        &["/home/username/documents"],
    ),
    var(
        "LD_LIBRARY_PATH",
        CORE_PATHS,
        "Directories the dynamic linker searches for shared libraries before the system defaults.",
        DIR_LIST,
        &["/opt/myapp/lib:/usr/local/custom_lib"],
    ),
    var(
        "MANPATH",
        CORE_PATHS,
        "Directories searched by `man` for manual pages.",
        DIR_LIST,
        &["/usr/local/share/man:/usr/share/man"],
    ),
    // User and session
    var(
        "USER",
        USER_SESSION,
        "Login name of the current user.",
        "User name",
        &["alice", "john"],
    ),
    var(
        "LOGNAME",
        USER_SESSION,
        "Login name of the current user, read by older POSIX tools.",
        "User name",
        &["bob"],
    ),
    var(
        "UID",
        USER_SESSION,
        "Numeric id of the current user.",
        "Non-negative integer",
        &["1000", "501"],
    ),
    var(
        "SHELL",
        USER_SESSION,
        "Absolute path of the user's login shell.",
        "Absolute path of a shell executable",
        &["/bin/zsh", "/bin/bash", "/usr/bin/fish"],
    ),
    var(
        "TERM",
        USER_SESSION,
        "Terminal type, used by full-screen programs to pick colors and control sequences.",
        "Terminal type name",
        &["xterm-256color", "screen", "vt100"],
    ),
    var(
        "SHLVL",
        USER_SESSION,
        "Shell nesting level: 1 for the login shell, incremented in every subshell.",
        "Positive integer",
        &["1", "2", "3"],
    ),
    // Localization
    var(
        "LANG",
        LOCALE,
        "Default locale for every category not overridden by an LC_* variable.",
        LOCALE_FORMAT,
        &["en_US.UTF-8", "zh_TW.UTF-8", "ja_JP.UTF-8"],
    ),
    var(
        "LC_ALL",
        LOCALE,
        "Overrides LANG and every other LC_* variable when set.",
        LOCALE_FORMAT,
        &["C", "POSIX", "en_US.UTF-8"],
    ),
    var(
        "LC_CTYPE",
        LOCALE,
        "Character classification, case conversion and encoding.",
        LOCALE_FORMAT,
        &["en_US.UTF-8", "C.UTF-8"],
    ),
    var(
        "LC_TIME",
        LOCALE,
        "Date and time formatting.",
        LOCALE_FORMAT,
        &["en_US.UTF-8", "de_DE.UTF-8"],
    ),
    // Shell customization
    var(
        "PS1",
        SHELL,
        "Primary prompt string.",
        "Prompt string with shell escapes",
        &["%n@%m %~ %# ", "[\\u@\\h \\W]\\$ "],
    ),
    var(
        "HISTFILE",
        SHELL,
        "File the command history is saved to.",
        "Path of a file",
        &["~/.zsh_history", "~/.bash_history"],
    ),
    var(
        "HISTSIZE",
        SHELL,
        "Number of history entries kept in memory for the session.",
        "Positive integer",
        &["1000", "10000", "50000"],
    ),
    var(
        "SAVEHIST",
        SHELL,
        "Number of history entries zsh writes to HISTFILE.",
        "Positive integer",
        &["1000", "10000", "50000"],
    ),
    var(
        "HISTFILESIZE",
        SHELL,
        "Maximum number of entries kept in HISTFILE.",
        "Positive integer",
        &["2000", "20000", "100000"],
    ),
    var(
        "HISTCONTROL",
        SHELL,
        "How commands are recorded: ignorespace skips commands starting with a space, ignoredups skips repeats.",
        "Colon-separated list of options",
        &["ignoredups", "ignorespace:ignoredups", "ignoreboth"],
    ),
    // Default applications
    var(
        "EDITOR",
        DEFAULT_APPS,
        "Default text editor, used by tools like `crontab -e`. Fallback for VISUAL.",
        COMMAND,
        &["vim", "nano", "emacs", "vi"],
    ),
    var(
        "VISUAL",
        DEFAULT_APPS,
        "Preferred full-screen editor. Checked before EDITOR by tools like `git commit`.",
        COMMAND,
        &["nvim", "code --wait", "subl --wait"],
    ),
    var(
        "PAGER",
        DEFAULT_APPS,
        "Program used to page long output, for example by `man` and `git log`.",
        COMMAND,
        &["less", "more", "bat"],
    ),
    // Zsh ecosystem
    var(
        "ZSH",
        ZSH,
        "Oh My Zsh installation directory. Required by the framework.",
        "Absolute directory path",
        &["$HOME/.oh-my-zsh", "~/.oh-my-zsh"],
    ),
    var(
        "ZSH_THEME",
        ZSH,
        "Oh My Zsh theme name. Empty disables theming, `random` picks one per shell.",
        "Theme name",
        &["robbyrussell", "agnoster", "random", "powerlevel10k/powerlevel10k"],
    ),
    // Java
    var(
        "JAVA_HOME",
        JAVA,
        "Root of the JDK installation, used by Maven, Gradle and most Java tooling.",
        "Absolute directory path",
        &["/usr/lib/jvm/java-17-openjdk-amd64"],
    ),
    var(
        "CLASSPATH",
        JAVA,
        "Directories and archives searched for Java classes.",
        "Colon-separated list of directories and JAR files",
        &[".:/usr/local/java/my-classes:/usr/local/java/lib/my-lib.jar"],
    ),
    var(
        "MAVEN_OPTS",
        JAVA,
        "JVM options passed to Maven.",
        "JVM command-line options",
        &["-Xmx2048m -Xms512m", "-Xmx4g -XX:+UseG1GC"],
    ),
    // Python
    var(
        "PYTHONPATH",
        PYTHON,
        "Extra directories added to Python's module search path.",
        DIR_LIST,
        &["/home/user/my_project/libs", "~/python-libs"],
    ),
    var(
        "VIRTUAL_ENV",
        PYTHON,
        "Path of the active virtual environment, set by its activate script.",
        "Absolute directory path",
        &["/home/user/projects/my-app/.venv"],
    ),
    // Node.js
    var(
        "NODE_ENV",
        NODE,
        "Runtime environment name read by Node.js frameworks.",
        "One of development, production, test, staging",
        &["development", "production", "test", "staging"],
    ),
    var(
        "NODE_PATH",
        NODE,
        "Extra directories searched for Node.js modules.",
        DIR_LIST,
        &["/usr/local/lib/node_modules", "~/.npm-global/lib/node_modules"],
    ),
    // Go
    var(
        "GOROOT",
        GO,
        "Go installation directory.",
        "Absolute directory path",
        &["/usr/local/go", "/opt/go"],
    ),
    var(
        "GOPATH",
        GO,
        "Go workspace holding downloaded modules and installed binaries.",
        "Absolute directory path",
        &["$HOME/go", "~/go"],
    ),
    var(
        "GO111MODULE",
        GO,
        "Controls Go module mode.",
        "One of on, off, auto",
        &["on", "auto", "off"],
    ),
    // Rust toolchain
    var(
        "RUSTUP_HOME",
        RUST,
        "Where rustup keeps toolchains and its metadata.",
        "Absolute directory path",
        &["$HOME/.rustup", "~/.rustup"],
    ),
    var(
        "CARGO_HOME",
        RUST,
        "Cargo's home directory: registry cache and installed binaries.",
        "Absolute directory path",
        &["$HOME/.cargo", "~/.cargo"],
    ),
    // Build system
    var("CC", BUILD, "C compiler used by make and configure scripts.", COMMAND, &["gcc", "clang", "cc"]),
    var("CXX", BUILD, "C++ compiler used by make and configure scripts.", COMMAND, &["g++", "clang++", "c++"]),
    var("CFLAGS", BUILD, "Extra flags for the C compiler.", "Compiler flags", &["-O2 -Wall", "-g -O0"]),
    var(
        "CXXFLAGS",
        BUILD,
        "Extra flags for the C++ compiler.",
        "Compiler flags",
        &["-std=c++17 -O2 -Wall", "-std=c++20 -g"],
    ),
    var(
        "LDFLAGS",
        BUILD,
        "Extra flags for the linker.",
        "Linker flags",
        &["-L/usr/local/lib -lcustom", "-Wl,-rpath,/opt/lib"],
    ),
    var(
        "CPPFLAGS",
        BUILD,
        "Extra flags for the C preprocessor.",
        "Preprocessor flags",
        &["-I/usr/local/include -DDEBUG"],
    ),
    var(
        "PKG_CONFIG_PATH",
        BUILD,
        "Extra directories searched by pkg-config for .pc files.",
        DIR_LIST,
        &["/usr/local/lib/pkgconfig:/opt/custom/lib/pkgconfig"],
    ),
    // Network proxy
    var(
        "HTTP_PROXY",
        PROXY,
        "Proxy server for HTTP requests.",
        "URL of the proxy",
        &["http://proxy.example.com:8080"],
    ),
    var(
        "HTTPS_PROXY",
        PROXY,
        "Proxy server for HTTPS requests.",
        "URL of the proxy",
        &["http://proxy.example.com:8080"],
    ),
    var(
        "NO_PROXY",
        PROXY,
        "Hosts and domains that bypass the proxy.",
        "Comma-separated list of hosts, domains or CIDR ranges",
        &["localhost,127.0.0.1,.example.com"],
    ),
];
