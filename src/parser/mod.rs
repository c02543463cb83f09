use crate::{
    prelude::*, repr::{Repr, Value}
};
use log::trace;
use nom::{
    branch::*, bytes::complete::*, character::complete::*, combinator::*, error::{context, convert_error, VerboseError}, multi::*, sequence::*, Err as NomErr, IResult, Parser
};

mod value;

pub type ParseError<'a> = NomErr<VerboseError<&'a str>>;
type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// 解析字典`Debug`输出
pub fn parse(input: &str) -> Result<Repr> {
    match terminated(repr, preceded(multispace0, eof))(input) {
        Ok((_, repr)) => Ok(repr),
        Err(e) => {
            let message = friendly_error(input, e);
            trace!("invalid representation: {message}");
            Err(Error::Parse(message))
        }
    }
}

/// 转换友好错误信息
pub fn friendly_error(input: &str, err: ParseError) -> String {
    match err {
        NomErr::Error(e) | NomErr::Failure(e) => convert_error(input, e),
        NomErr::Incomplete(_) => "incomplete input".to_owned()
    }
}

/// 字典解析
///
/// # Input
///
/// ```txt
/// CiMap({"Hello": 1, "world": 2})
/// ```
///
/// # Output
///
/// ```txt
/// (CiMap,[(Hello,1),(world,2)])
/// ```
fn repr(input: &str) -> ParseResult<Repr> {
    fn name(input: &str) -> ParseResult<&str> {
        //必须是字母开头
        satisfy(|c| c.is_alphabetic())(input)?;
        context("name", take_while1(|c: char| c.is_alphanumeric() || c == '_'))(input)
    }
    let (input, name) = preceded(multispace0, name)(input)?;
    let (input, pairs) = context(
        "map",
        delimited(
            preceded(multispace0, char('(')),
            preceded(multispace0, entries),
            preceded(multispace0, char(')'))
        )
    )(input)?;
    Ok((input, Repr { name, pairs }))
}

/// 键值对列表解析
///
/// 允许多行格式(`{:#?}`)和末尾的`,`
///
/// # Input
///
/// ```txt
/// {"Hello": 1, "world": 2,}
/// ```
fn entries(input: &str) -> ParseResult<Vec<(String, Value)>> {
    let entry = delimited(multispace0, key_value, multispace0);
    delimited(
        char('{'),
        alt((terminated(separated_list1(char(','), entry), opt(char(','))), success(Vec::new()))),
        preceded(multispace0, char('}'))
    )(input)
}

/// 键值对解析
///
/// # Input
///
/// ```txt
/// "key": value
/// ```
///
/// # Output
///
/// ```txt
/// (key,value)
/// ```
fn key_value(input: &str) -> ParseResult<(String, Value)> {
    fn key(input: &str) -> ParseResult<String> { context("key", value::string)(input) }
    /// 引号值后面必须是`,`或`}`,否则按原样截取
    fn end(input: &str) -> ParseResult<char> { peek(preceded(multispace0, one_of(",}")))(input) }
    fn item(input: &str) -> ParseResult<Value> {
        context(
            "value",
            cut(alt((
                terminated(value::string, end).map(Value::String),
                terminated(value::char_literal, end).map(Value::Char),
                value::raw.map(Value::Raw)
            )))
        )(input)
    }
    separated_pair(key, delimited(multispace0, char(':'), multispace0), item)(input)
}
