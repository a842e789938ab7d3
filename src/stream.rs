//! Flat cell streams.
//!
//! A stream holds zero or more cells of one bucket as consecutive runs of
//! `[count, id_0, .., id_{count-1}]`.
use crate::*;

/// One of the four cell streams of a [`PolyData`].
///
/// The declaration order is the global cell order used to index cell data.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub enum Bucket {
    Vertices,
    Lines,
    Polygons,
    TriangleStrips,
}

impl Bucket {
    /// All buckets, in global cell order.
    pub const ALL: [Bucket; 4] = [
        Bucket::Vertices,
        Bucket::Lines,
        Bucket::Polygons,
        Bucket::TriangleStrips,
    ];
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Bucket::Vertices => "vertices",
            Bucket::Lines => "lines",
            Bucket::Polygons => "polygons",
            Bucket::TriangleStrips => "triangle strips",
        };
        f.write_str(s)
    }
}

/// Append a single run for `ids` onto `stream`.
pub fn push_run(stream: &mut Vec<u32>, ids: &[PointId]) {
    stream.reserve(ids.len() + 1);
    stream.push(ids.len() as u32);
    stream.extend_from_slice(ids);
}

/// A decoded run, borrowing its ids from the stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Run<'a> {
    /// Offset of the count prefix within the stream.
    pub offset: usize,
    pub ids: &'a [PointId],
}

/// Iterator over the runs of a stream.
///
/// A run that overruns the stream yields [`Error::MalformedStream`] and ends the iteration.
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    bucket: Bucket,
    stream: &'a [u32],
    offset: usize,
}

/// Decode the runs of `stream`, reporting errors against `bucket`.
pub fn runs(bucket: Bucket, stream: &[u32]) -> Runs<'_> {
    Runs {
        bucket,
        stream,
        offset: 0,
    }
}

/// Count the runs in `stream`, validating the encoding.
pub fn count_runs(bucket: Bucket, stream: &[u32]) -> Result<usize> {
    runs(bucket, stream).try_fold(0, |n, run| run.map(|_| n + 1))
}

impl<'a> Iterator for Runs<'a> {
    type Item = Result<Run<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let offset = self.offset;
        let (&count, rest) = self.stream.get(offset..)?.split_first()?;
        let count = count as usize;

        match rest.get(..count) {
            Some(ids) => {
                self.offset = offset + 1 + count;
                Some(Ok(Run { offset, ids }))
            }
            None => {
                self.offset = self.stream.len();
                Some(Err(Error::MalformedStream {
                    bucket: self.bucket,
                    offset,
                    count,
                    remaining: rest.len(),
                }))
            }
        }
    }
}

impl std::iter::FusedIterator for Runs<'_> {}
