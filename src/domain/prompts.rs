//! Prompt catalogue: the fixed texts that make up the two template bundles and
//! the system prompts sent to the model.
//!
//! Texts are written indented for readability and normalised once with
//! [`strip_indents`] on first use.

use std::sync::LazyLock;

use crate::domain::strip_indents;

/// Working directory the chat system prompt describes when none is given.
pub const DEFAULT_WORK_DIR: &str = "/home/project";

/// System instruction for the classification call. The model must answer with
/// one bare word.
pub const CLASSIFY_SYSTEM_PROMPT: &str = "Return either node or react based on what do you think this project should be. Only return a single word either 'node' or 'react'. Do not return anything extra";

const BASE_PROMPT_RAW: &str = r#"
    For all designs I ask you to make, have them be beautiful, not cookie cutter.
    Make webpages that are fully featured and worthy for production.

    By default, this template supports JSX syntax with Tailwind CSS classes, React hooks, and Lucide React for icons.
    Do not install other packages for UI themes, icons, etc unless absolutely necessary or I request them.

    Use icons from lucide-react for logos.

    Use stock photos from unsplash where appropriate, only valid URLs you know exist.
    Do not download the images, only link to them in image tags.
"#;

const REACT_PROJECT_PROMPT_RAW: &str = r#"
    Project Files:

    The following is a list of all project files and their complete contents that are currently visible and accessible to you.

    eslint.config.js, index.html, package.json, postcss.config.js, tailwind.config.js,
    tsconfig.app.json, tsconfig.json, tsconfig.node.json, vite.config.ts,
    src/App.tsx, src/index.css, src/main.tsx, src/vite-env.d.ts

    The project is a Vite + React + TypeScript application styled with Tailwind CSS.
    Here is a list of files that exist on the file system but are not being shown to you:

    .gitignore
    package-lock.json
"#;

const REACT_BASE_PROMPT_RAW: &str = r#"
    <boltArtifact id="project-import" title="Project Files">
    <boltAction type="file" filePath="package.json">{"name":"vite-react-typescript-starter","private":true,"version":"0.0.0","type":"module","scripts":{"dev":"vite","build":"vite build","lint":"eslint .","preview":"vite preview"}}</boltAction>
    <boltAction type="file" filePath="index.html"><!doctype html><html lang="en"><head><meta charset="UTF-8" /><title>Vite + React + TS</title></head><body><div id="root"></div><script type="module" src="/src/main.tsx"></script></body></html></boltAction>
    <boltAction type="file" filePath="src/main.tsx">import { StrictMode } from 'react'; import { createRoot } from 'react-dom/client'; import App from './App.tsx'; import './index.css'; createRoot(document.getElementById('root')!).render(<StrictMode><App /></StrictMode>);</boltAction>
    <boltAction type="file" filePath="src/App.tsx">function App() { return <div className="min-h-screen bg-gray-100 flex items-center justify-center"><p>Start prompting (or editing) to see magic happen :)</p></div>; } export default App;</boltAction>
    <boltAction type="file" filePath="src/index.css">@tailwind base; @tailwind components; @tailwind utilities;</boltAction>
    </boltArtifact>
"#;

const NODE_PROJECT_PROMPT_RAW: &str = r#"
    Project Files:

    The following is a list of all project files and their complete contents that are currently visible and accessible to you.

    index.js, package.json

    The project is a plain Node.js application.
    Here is a list of files that exist on the file system but are not being shown to you:

    .gitignore
    package-lock.json
"#;

const NODE_BASE_PROMPT_RAW: &str = r#"
    <boltArtifact id="project-import" title="Project Files">
    <boltAction type="file" filePath="index.js">// run `node index.js` in the terminal
    console.log(`Hello Node.js v${process.versions.node}!`);</boltAction>
    <boltAction type="file" filePath="package.json">{"name":"node-starter","private":true,"scripts":{"test":"echo \"Error: no test specified\" && exit 1"}}</boltAction>
    </boltArtifact>
"#;

const CHAT_SYSTEM_PROMPT_RAW: &str = r#"
    You are Bolt, an expert AI assistant and exceptional senior software developer with vast knowledge across multiple programming languages, frameworks, and best practices.

    <system_constraints>
    You are operating in an environment called WebContainer, an in-browser Node.js runtime that emulates a Linux system to some degree.
    It runs in the browser and does not run a full-fledged Linux system and does not rely on a cloud VM to execute code.
    All code is executed in the browser. It comes with a shell that emulates zsh.
    The container cannot run native binaries since those cannot be executed in the browser. It can only execute code that is native to a browser including JS, WebAssembly, etc.
    There is no pip and no C/C++ compiler available. Git is NOT available.
    Prefer using Vite instead of implementing a custom web server.
    Prefer writing Node.js scripts instead of shell scripts.
    </system_constraints>

    <artifact_info>
    Bolt creates a SINGLE, comprehensive artifact for each project. The artifact contains all necessary steps and components, including:
    - Shell commands to run including dependencies to install using a package manager (NPM)
    - Files to create and their contents
    - Folders to create if necessary

    The current working directory is `{cwd}`.
    Wrap the content in opening and closing `<boltArtifact>` tags. These tags contain more specific `<boltAction>` elements.
    Use `<boltAction type="file" filePath="...">` for every file and `<boltAction type="shell">` for every command.
    The order of the actions is VERY IMPORTANT. Always provide the FULL, updated content of a file. Never use placeholders.
    </artifact_info>

    NEVER use the word "artifact" in prose. Do NOT be verbose and DO NOT explain anything unless the user asks for more information.
    ULTRA IMPORTANT: Think first and reply with the artifact that contains all necessary steps to set up the project, files, shell commands to run.
"#;

pub static BASE_PROMPT: LazyLock<String> = LazyLock::new(|| strip_indents(BASE_PROMPT_RAW));
pub static REACT_PROJECT_PROMPT: LazyLock<String> =
    LazyLock::new(|| strip_indents(REACT_PROJECT_PROMPT_RAW));
pub static REACT_BASE_PROMPT: LazyLock<String> =
    LazyLock::new(|| strip_indents(REACT_BASE_PROMPT_RAW));
pub static NODE_PROJECT_PROMPT: LazyLock<String> =
    LazyLock::new(|| strip_indents(NODE_PROJECT_PROMPT_RAW));
pub static NODE_BASE_PROMPT: LazyLock<String> =
    LazyLock::new(|| strip_indents(NODE_BASE_PROMPT_RAW));

/// Builds the chat system prompt for a project rooted at `work_dir`.
/// An empty `work_dir` falls back to [`DEFAULT_WORK_DIR`].
pub fn chat_system_prompt(work_dir: &str) -> String {
    let cwd = if work_dir.is_empty() {
        DEFAULT_WORK_DIR
    } else {
        work_dir
    };
    strip_indents(CHAT_SYSTEM_PROMPT_RAW).replace("{cwd}", cwd)
}
