//! Scene File Reader

use pest::error::LineColLocation;
use pest::Parser;
use pest_derive::Parser;
use pmap::base::*;
use pmap::error::*;
use pmap::material::*;
use pmap::scene::*;
use std::fs;
use std::iter::Peekable;
use std::vec::IntoIter;

/// The `pest` parser generated from a grammar.
#[derive(Parser)]
#[grammar = "scene.pest"]
struct SceneParser;

/// Read the primitives of a scene file into an object registry.
///
/// * `path` - File path.
pub fn read_scene(path: &str) -> Result<ObjectRegistry> {
    let text = fs::read_to_string(path)?;
    parse_scene(path, &text)
}

/// Parse scene text into an object registry. Every primitive has the form
/// `modifier type identifier` followed by counted string, integer and real
/// argument lists, except `alias` which names another object instead.
///
/// * `path` - File path used in error messages.
/// * `text` - Contents of the file.
pub fn parse_scene(path: &str, text: &str) -> Result<ObjectRegistry> {
    let mut tokens = Tokens::new(path, text)?;
    let mut registry = ObjectRegistry::new();

    while let Some(modifier) = tokens.next_if_any() {
        if modifier != "void" && registry.find(modifier).is_none() {
            return Err(tokens.error(format!("undefined modifier '{}'", modifier)));
        }

        let type_name = tokens.next("primitive type")?;
        let name = tokens.next("identifier")?;

        if type_name == "alias" {
            let target = tokens.next("alias target")?;
            let material = registry
                .find_material(target)
                .map(|m| (m.kind, m.args.clone()));
            match (material, registry.find(target).is_some()) {
                (Some((kind, args)), _) => {
                    registry.add_material(modifier, MaterialRecord::new(name, kind, args));
                }
                (None, true) => {
                    registry.add_geometry(modifier, type_name, name);
                }
                (None, false) => {
                    return Err(tokens.error(format!("undefined alias target '{}'", target)));
                }
            }
            continue;
        }

        let n = tokens.count("string argument count")?;
        for _ in 0..n {
            tokens.next("string argument")?;
        }

        let n = tokens.count("integer argument count")?;
        for _ in 0..n {
            tokens.integer()?;
        }

        let n = tokens.count("real argument count")?;
        let reals = (0..n)
            .map(|_| tokens.real())
            .collect::<Result<Vec<Float>>>()?;

        match type_name.parse::<MaterialKind>() {
            Ok(kind) => {
                debug!("{}: material {} '{}' {:?}", path, kind, name, reals);
                registry.add_material(modifier, MaterialRecord::new(name, kind, reals));
            }
            Err(_) => {
                registry.add_geometry(modifier, type_name, name);
            }
        }
    }

    Ok(registry)
}

/// Tokens of a scene file with their line numbers.
struct Tokens<'a> {
    /// File path used in error messages.
    path: &'a str,

    /// Remaining tokens.
    tokens: Peekable<IntoIter<(usize, &'a str)>>,

    /// Line of the most recently read token.
    line: usize,
}

impl<'a> Tokens<'a> {
    /// Split scene text into tokens. Commands are skipped with a warning.
    ///
    /// * `path` - File path used in error messages.
    /// * `text` - Contents of the file.
    fn new(path: &'a str, text: &'a str) -> Result<Self> {
        let scene = SceneParser::parse(Rule::scene, text)
            .map_err(|err| {
                let line = match err.line_col {
                    LineColLocation::Pos((line, _)) => line,
                    LineColLocation::Span((line, _), _) => line,
                };
                PhotonMapError::SceneParse {
                    path: path.to_owned(),
                    line,
                    message: err.variant.message().to_string(),
                }
            })?
            .next();

        let mut tokens = vec![];
        for pair in scene.into_iter().flat_map(|p| p.into_inner()) {
            let (line, _) = pair.as_span().start_pos().line_col();
            match pair.as_rule() {
                Rule::token => tokens.push((line, pair.as_str())),
                Rule::command => warn!("{}:{}: ignoring command '{}'", path, line, pair.as_str()),
                _ => (),
            }
        }

        Ok(Self {
            path,
            tokens: tokens.into_iter().peekable(),
            line: 1,
        })
    }

    /// Returns the next token or `None` at the end of the file.
    fn next_if_any(&mut self) -> Option<&'a str> {
        self.tokens.next().map(|(line, token)| {
            self.line = line;
            token
        })
    }

    /// Returns the next token.
    ///
    /// * `what` - Description of the expected token.
    fn next(&mut self, what: &str) -> Result<&'a str> {
        self.next_if_any()
            .ok_or_else(|| self.error(format!("unexpected end of file, expected {}", what)))
    }

    /// Returns the next token as an argument count.
    ///
    /// * `what` - Description of the expected count.
    fn count(&mut self, what: &str) -> Result<usize> {
        let token = self.next(what)?;
        token
            .parse::<usize>()
            .map_err(|_| self.error(format!("bad {} '{}'", what, token)))
    }

    /// Returns the next token as an integer argument.
    fn integer(&mut self) -> Result<i64> {
        let token = self.next("integer argument")?;
        token
            .parse::<i64>()
            .map_err(|_| self.error(format!("bad integer argument '{}'", token)))
    }

    /// Returns the next token as a real argument.
    fn real(&mut self) -> Result<Float> {
        let token = self.next("real argument")?;
        token
            .parse::<Float>()
            .map_err(|_| self.error(format!("bad real argument '{}'", token)))
    }

    /// Returns a parse error at the current line.
    ///
    /// * `message` - Error message.
    fn error(&self, message: String) -> PhotonMapError {
        PhotonMapError::SceneParse {
            path: self.path.to_owned(),
            line: self.line,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENE: &str = "
# A small test scene.
void plastic red
0
0
5 0.5 0.1 0.1 0.05 0.02

void antimatter portal
1 red
0
0

!xform -t 1 0 0 ball.rad

red sphere ball
0
0
4 0 0 0 1

void glass pane
0
0
3 .96 .96 .96
void alias pane2 pane
";

    #[test]
    fn reads_materials_and_geometry() {
        let reg = parse_scene("test.rad", SCENE).unwrap();
        assert_eq!(reg.len(), 5);

        let red = reg.find_material("red").unwrap();
        assert_eq!(red.kind, MaterialKind::Plastic);
        assert_eq!(red.args, vec![0.5, 0.1, 0.1, 0.05, 0.02]);

        assert!(reg.find_material("portal").unwrap().args.is_empty());

        let ball = reg.find("ball").unwrap();
        assert_eq!(ball.kind, ObjectKind::Geometry("sphere".to_owned()));
        assert_eq!(ball.modifier, "red");

        let pane2 = reg.find_material("pane2").unwrap();
        assert_eq!(pane2.kind, MaterialKind::Glass);
        assert_eq!(pane2.args, vec![0.96, 0.96, 0.96]);
    }

    #[test]
    fn empty_scene() {
        assert!(parse_scene("empty.rad", "# nothing here\n").unwrap().is_empty());
    }

    #[test]
    fn truncated_primitive() {
        match parse_scene("bad.rad", "void plastic red\n0\n0\n5 0.5 0.5\n") {
            Err(PhotonMapError::SceneParse { path, line, message }) => {
                assert_eq!(path, "bad.rad");
                assert_eq!(line, 4);
                assert!(message.contains("end of file"));
            }
            other => panic!("unexpected {:?}", other.map(|r| r.len())),
        }
    }

    #[test]
    fn bad_numbers() {
        assert!(parse_scene("bad.rad", "void plastic red\nx\n").is_err());
        assert!(parse_scene("bad.rad", "void plastic red\n0\n1 1.5\n0\n").is_err());
        assert!(parse_scene("bad.rad", "void mirror m\n0\n0\n3 1 one 1\n").is_err());
    }

    #[test]
    fn undefined_references() {
        match parse_scene("bad.rad", "void plastic red\n0\n0\n0\n\nblue sphere s\n0\n0\n4 0 0 0 1\n") {
            Err(PhotonMapError::SceneParse { line, message, .. }) => {
                assert_eq!(line, 6);
                assert!(message.contains("blue"));
            }
            other => panic!("unexpected {:?}", other.map(|r| r.len())),
        }
        assert!(parse_scene("bad.rad", "void alias a nowhere\n").is_err());
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_scene("/nonexistent/scene.rad"),
            Err(PhotonMapError::Io(_))
        ));
    }
}
