//! Parsing of group names such as `S5`, `D_6` or `Z2 x (S3 x U8)` into a [`Family`].

use anyhow::{anyhow, Context};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, space0},
    combinator::{map, map_res, opt},
    error::{context, ParseError, VerboseError},
    multi::fold_many0,
    sequence::{delimited, preceded},
    IResult as IResultBase, Parser,
};

use crate::standard::Family;

type IResult<I, O> = IResultBase<I, O, VerboseError<I>>;

/// Pad both ends with whitespace
fn space<'a, O, E: ParseError<&'a str>, F: Parser<&'a str, O, E>>(
    f: F,
) -> impl FnMut(&'a str) -> IResultBase<&'a str, O, E> {
    delimited(space0, f, space0)
}

/// The size parameter of a family, optionally preceded by an underscore.
fn size(i: &str) -> IResult<&str, u32> {
    context(
        "group size",
        preceded(opt(char('_')), map_res(digit1, str::parse)),
    )(i)
}

fn named(i: &str) -> IResult<&str, Family> {
    alt((
        map(preceded(char('S'), size), |n| Family::Symmetric(n as usize)),
        map(preceded(char('A'), size), |n| Family::Alternating(n as usize)),
        map(preceded(char('D'), size), |n| Family::Dihedral(n as usize)),
        map(preceded(alt((char('Z'), char('C'))), size), Family::Cyclic),
        map(preceded(char('U'), size), Family::Units),
    ))(i)
}

fn factor(i: &str) -> IResult<&str, Family> {
    space(alt((
        named,
        delimited(char('('), family, context("closing bracket", char(')'))),
    )))(i)
}

fn product_op(i: &str) -> IResult<&str, &str> {
    alt((tag("x"), tag("×"), tag("*")))(i)
}

fn family(i: &str) -> IResult<&str, Family> {
    let (i, first) = factor(i)?;
    fold_many0(
        preceded(product_op, factor),
        move || first.clone(),
        |a, b| Family::Product(Box::new(a), Box::new(b)),
    )(i)
}

fn convert_error(i: &str) -> impl FnOnce(nom::Err<VerboseError<&str>>) -> anyhow::Error + '_ {
    move |err| {
        anyhow!(match err {
            nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(i, e),
            _ => format!("{err:#}"),
        })
    }
}

/// Parses and validates a group name. Products associate to the left.
pub fn parse_family(i: &str) -> anyhow::Result<Family> {
    let (rest, family) = family(i)
        .map_err(convert_error(i))
        .with_context(|| format!("Error when parsing group name {i}"))?;
    if !rest.is_empty() {
        return Err(anyhow!(
            "Failed to consume all of input. Remaining: '{rest}'"
        ));
    }
    family
        .validate()
        .with_context(|| format!("Invalid group {family}"))?;
    Ok(family)
}
